use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Character – one related entity listed on a comic
// ---------------------------------------------------------------------------

/// A character appearing in a comic, as listed by the upstream catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
}

/// The characters block of one comic. `available` is the upstream total and
/// may exceed `items.len()`: the catalog lists only a subset per issue.
#[derive(Debug, Clone, Default)]
pub struct CharacterRoster {
    /// Total number of associated characters reported upstream.
    pub available: u32,
    /// The listed subset, in upstream order.
    pub items: Vec<Character>,
}

// ---------------------------------------------------------------------------
// Comic – one row of the catalog
// ---------------------------------------------------------------------------

/// A single price entry ("printPrice", "digitalPurchasePrice", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub kind: String,
    pub amount: f64,
}

/// Cover image reference. The upstream splits path and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    /// Joined image URL, the form the upstream expects consumers to build.
    pub fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

/// A single comic issue (one row of the fetched catalog).
#[derive(Debug, Clone)]
pub struct Comic {
    /// Stable upstream identifier.
    pub id: u64,
    pub title: String,
    /// Categorical format tag ("comic", "graphic novel", "trade paperback").
    /// Empty means untagged; an empty tag never constrains filtering.
    pub kind: String,
    pub characters: CharacterRoster,
    pub description: Option<String>,
    pub issue_number: f64,
    pub page_count: u32,
    pub prices: Vec<Price>,
    pub thumbnail: Option<Thumbnail>,
}

impl fmt::Display for Comic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete cleaned collection
// ---------------------------------------------------------------------------

/// The cleaned catalog with pre-computed filter option sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Eligible comics, load order preserved.
    pub comics: Vec<Comic>,
    /// Sorted unique character names across all listed rosters.
    pub character_names: BTreeSet<String>,
    /// Sorted unique non-empty format tags.
    pub kinds: BTreeSet<String>,
}

impl Catalog {
    /// Build option indices from an already-cleaned collection.
    pub fn from_comics(comics: Vec<Comic>) -> Self {
        let mut character_names: BTreeSet<String> = BTreeSet::new();
        let mut kinds: BTreeSet<String> = BTreeSet::new();

        for comic in &comics {
            for character in &comic.characters.items {
                character_names.insert(character.name.clone());
            }
            if !comic.kind.is_empty() {
                kinds.insert(comic.kind.clone());
            }
        }
        Catalog {
            comics,
            character_names,
            kinds,
        }
    }

    /// Number of comics.
    pub fn len(&self) -> usize {
        self.comics.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.comics.is_empty()
    }

    /// The numeric series the statistics run over: reported character counts
    /// in collection order.
    pub fn character_counts(&self) -> Vec<u32> {
        self.comics
            .iter()
            .map(|comic| comic.characters.available)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(id: u64, title: &str, kind: &str, names: &[&str]) -> Comic {
        Comic {
            id,
            title: title.to_string(),
            kind: kind.to_string(),
            characters: CharacterRoster {
                available: names.len() as u32,
                items: names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| Character {
                        id: i as u64 + 1,
                        name: name.to_string(),
                    })
                    .collect(),
            },
            description: None,
            issue_number: 1.0,
            page_count: 32,
            prices: Vec::new(),
            thumbnail: None,
        }
    }

    #[test]
    fn option_indices_deduplicate_and_sort() {
        let catalog = Catalog::from_comics(vec![
            comic(1, "B", "comic", &["Wolverine", "Storm"]),
            comic(2, "A", "graphic novel", &["Storm"]),
            comic(3, "C", "", &[]),
        ]);

        let names: Vec<&str> = catalog.character_names.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Storm", "Wolverine"]);

        let kinds: Vec<&str> = catalog.kinds.iter().map(String::as_str).collect();
        assert_eq!(kinds, vec!["comic", "graphic novel"]);
    }

    #[test]
    fn character_counts_follow_collection_order() {
        let mut a = comic(1, "A", "comic", &["X"]);
        a.characters.available = 7; // upstream total beyond the listed subset
        let b = comic(2, "B", "comic", &["Y", "Z"]);

        let catalog = Catalog::from_comics(vec![a, b]);
        assert_eq!(catalog.character_counts(), vec![7, 2]);
    }

    #[test]
    fn thumbnail_url_joins_path_and_extension() {
        let thumb = Thumbnail {
            path: "http://i.example/u/prod/comics/clean".to_string(),
            extension: "jpg".to_string(),
        };
        assert_eq!(thumb.url(), "http://i.example/u/prod/comics/clean.jpg");
    }
}
