use anyhow::{Context, Result};
use std::str::FromStr;

use tourbook_core::model::Artist;
use tourbook_core::Dataset;
use tourbook_search::artists;

/// Artist filters from the command line. Unset filters keep everything.
#[derive(Debug, Default)]
pub struct Filters {
    pub name: Option<String>,
    pub member: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub founded: Option<(i32, i32)>,
    pub members: Option<(usize, usize)>,
}

/// Parse an inclusive `MIN..MAX` range. A single value means `N..N`.
pub fn parse_range<T>(text: &str) -> Result<(T, T)>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = text.trim();
    let (min, max) = text.split_once("..").unwrap_or((text, text));
    let min = min
        .trim()
        .parse()
        .with_context(|| format!("Invalid range start in '{text}'"))?;
    let max = max
        .trim()
        .parse()
        .with_context(|| format!("Invalid range end in '{text}'"))?;
    Ok((min, max))
}

/// Apply every set filter in turn.
pub fn select<'a>(dataset: &'a Dataset, filters: &Filters) -> Vec<&'a Artist> {
    let mut selected: Vec<&Artist> = dataset.artists().iter().collect();

    if let Some(name) = &filters.name {
        selected = artists::search_by_name(selected, name);
    }
    if let Some(member) = &filters.member {
        selected = artists::search_by_member(selected, member);
    }
    if let Some(album) = &filters.album {
        selected = artists::search_by_album(selected, album);
    }
    if let Some(year) = filters.year {
        selected = artists::search_by_creation_year(selected, year);
    }
    if let Some((min, max)) = filters.founded {
        selected = artists::filter_by_creation_year_range(selected, min, max);
    }
    if let Some((min, max)) = filters.members {
        selected = artists::filter_by_member_count(selected, min, max);
    }

    selected
}

pub fn run(dataset: &Dataset, filters: &Filters) {
    let selected = select(dataset, filters);

    if selected.is_empty() {
        println!("No artists match");
        return;
    }

    for artist in &selected {
        println!(
            "  [{:>3}] {} (formed {}, first album {})",
            artist.id.get(), artist.name, artist.creation_date, artist.first_album
        );
        if !artist.members.is_empty() {
            println!("        {}", artist.members.join(", "));
        }
    }
    println!("\n{} artist(s)", selected.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_core(
            vec![
                Artist::new(1, "Queen")
                    .with_creation_date(1970)
                    .with_first_album("14-12-1973")
                    .with_member("Freddie Mercury")
                    .with_member("Brian May")
                    .with_member("John Deacon")
                    .with_member("Roger Taylor"),
                Artist::new(2, "Eminem")
                    .with_creation_date(1996)
                    .with_first_album("12-11-1996")
                    .with_member("Eminem"),
                Artist::new(3, "Mamonas Assassinas")
                    .with_creation_date(1995)
                    .with_first_album("23-06-1995")
                    .with_member("Dinho")
                    .with_member("Bento Hinoto"),
            ],
            Vec::new(),
        )
    }

    fn names(selected: &[&Artist]) -> Vec<String> {
        selected.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range::<i32>("1980..1999").unwrap(), (1980, 1999));
        assert_eq!(parse_range::<usize>(" 2 .. 4 ").unwrap(), (2, 4));
        assert_eq!(parse_range::<usize>("3").unwrap(), (3, 3));
    }

    #[test]
    fn test_parse_range_invalid() {
        assert!(parse_range::<i32>("1980..").is_err());
        assert!(parse_range::<usize>("two..4").is_err());
        assert!(parse_range::<usize>("-1..4").is_err());
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let dataset = dataset();
        assert_eq!(select(&dataset, &Filters::default()).len(), 3);
    }

    #[test]
    fn test_filters_compose() {
        let dataset = dataset();
        let filters = Filters {
            founded: Some((1990, 1999)),
            members: Some((2, 4)),
            ..Filters::default()
        };
        assert_eq!(names(&select(&dataset, &filters)), vec!["Mamonas Assassinas"]);

        let filters = Filters {
            member: Some("may".to_string()),
            year: Some(1970),
            ..Filters::default()
        };
        assert_eq!(names(&select(&dataset, &filters)), vec!["Queen"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let dataset = dataset();
        let filters = Filters {
            founded: Some((1999, 1980)),
            ..Filters::default()
        };
        assert!(select(&dataset, &filters).is_empty());
    }

    #[test]
    fn test_album_filter_matches_label() {
        let dataset = dataset();
        let filters = Filters {
            album: Some("1996".to_string()),
            ..Filters::default()
        };
        assert_eq!(names(&select(&dataset, &filters)), vec!["Eminem"]);
    }
}
