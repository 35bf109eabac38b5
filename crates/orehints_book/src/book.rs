//! Patchouli-style field-guide book emission.
//!
//! A [`Book`] is a tree of categories, entries, and pages; building it
//! emits one JSON document per category and entry under the book's
//! per-language asset tree, with all reader-visible text routed through
//! [`I18n`].

use serde_json::json;

use orehints_core::ore::published_indicators;
use orehints_res::ResourceWriter;

use crate::i18n::I18n;

/// Domain the field guide is published under.
pub const BOOK_DOMAIN: &str = "tfcgyres_orehints";

/// Book identifier within the domain.
pub const BOOK_ID: &str = "field_guide";

/// Language keys emitted alongside the worldgen data.
#[must_use]
pub fn default_lang() -> Vec<(&'static str, &'static str)> {
    vec![
        ("tfc.field_guide.book_name", "TerraFirmaCraft"),
        (
            "tfc.field_guide.book_landing_text",
            "Welcome traveller! This book will be the source of all you need to know as you explore the world of TerraFirmaCraft (TFC).",
        ),
    ]
}

/// One page of an entry.
#[derive(Debug, Clone)]
pub enum Page {
    /// A plain text page (Patchouli format codes allowed).
    Text(String),
}

/// One book entry: a titled sequence of pages within a category.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry identifier, used in paths and link anchors.
    pub id: &'static str,
    /// Reader-visible entry title.
    pub name: &'static str,
    /// Item icon shown next to the entry.
    pub icon: &'static str,
    /// Pages in reading order.
    pub pages: Vec<Page>,
}

/// One book category.
#[derive(Debug, Clone)]
pub struct Category {
    /// Category identifier, used in paths.
    pub id: &'static str,
    /// Reader-visible category title.
    pub name: &'static str,
    /// Reader-visible category description.
    pub description: String,
    /// Item icon shown next to the category.
    pub icon: &'static str,
    /// Entries in display order.
    pub entries: Vec<Entry>,
}

/// The field guide book.
#[derive(Debug)]
pub struct Book {
    domain: &'static str,
    id: &'static str,
}

impl Book {
    /// The OreHints field guide.
    #[must_use]
    pub fn new() -> Self {
        Self {
            domain: BOOK_DOMAIN,
            id: BOOK_ID,
        }
    }

    /// Emit the book definition plus every category and entry for the
    /// language carried by `i18n`.
    pub fn build(&self, writer: &mut dyn ResourceWriter, i18n: &mut I18n, categories: &[Category]) {
        writer.write(
            &["assets", self.domain, "patchouli_books", self.id, "book"],
            json!({
                "name": format!("tfc.{}.book_name", self.id),
                "landing_text": format!("tfc.{}.book_landing_text", self.id),
                "use_resource_pack": true,
            }),
        );

        let lang = i18n.lang().to_string();
        for (sortnum, category) in categories.iter().enumerate() {
            let name_key = format!("book.{}.name", category.id);
            let desc_key = format!("book.{}.description", category.id);
            writer.write(
                &[
                    "assets",
                    self.domain,
                    "patchouli_books",
                    self.id,
                    &lang,
                    "categories",
                    category.id,
                ],
                json!({
                    "name": i18n.translate(&name_key, category.name),
                    "description": i18n.translate(&desc_key, &category.description),
                    "icon": category.icon,
                    "sortnum": sortnum,
                }),
            );

            for entry in &category.entries {
                let name_key = format!("book.{}.{}.name", category.id, entry.id);
                let pages: Vec<_> = entry
                    .pages
                    .iter()
                    .enumerate()
                    .map(|(i, page)| match page {
                        Page::Text(text) => {
                            let key = format!("book.{}.{}.page{i}", category.id, entry.id);
                            json!({
                                "type": "patchouli:text",
                                "text": i18n.translate(&key, text),
                            })
                        }
                    })
                    .collect();
                writer.write(
                    &[
                        "assets",
                        self.domain,
                        "patchouli_books",
                        self.id,
                        &lang,
                        "entries",
                        category.id,
                        entry.id,
                    ],
                    json!({
                        "name": i18n.translate(&name_key, entry.name),
                        "category": format!("{}:{}", self.domain, category.id),
                        "icon": entry.icon,
                        "pages": pages,
                    }),
                );
            }
        }
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-case a table identifier for display: `bituminous_coal` becomes
/// `Bituminous Coal`.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split(['_', '/'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The mineral-to-hint-rock table page.
fn indicator_table_page() -> String {
    let mut text = format!("$(bold){:_<12}{:_>16}$(br)$()", "Ore", "Hint Rock");
    for (ore, rock) in published_indicators() {
        let line = format!(
            "$(l:the_world/ores_and_minerals#{ore}){:_<16}$(){:_>10}$(br)",
            title_case(ore),
            title_case(rock)
        );
        text.push_str(&line);
    }
    text
}

/// The field guide's content: the ore-hints category.
#[must_use]
pub fn field_guide() -> Vec<Category> {
    vec![Category {
        id: "tfcgyres_orehints",
        name: "Ore Hints and Spawning",
        description: "Mineral veins now have hint rocks like metal veins have small nuggets! \
            $(br2)Thanks to AnodeCathode of TechNodeFirmaCraft for the \"hint rock\" idea and \
            initial rock selections.$(br2)Additional rich iron veins spawn in the mountains \
            above y=90."
            .to_string(),
        icon: "tfc:metal/propick/steel",
        entries: vec![Entry {
            id: "orehints",
            name: "Mineral Hints",
            icon: "tfc:ore/graphite",
            pages: vec![
                Page::Text(
                    "Finding TFC mineral veins is easier with OreHints!$(br2)Hint rocks \
                     generate in the world near mineral veins just like nuggets for metal \
                     ores. Coal and halite do not currently have working indicators.$(br)Find \
                     these rocks on the surface where they don't match, and in caves, and \
                     there's likely a mineral vein around! Underground indicators for every \
                     metal vein also spawn."
                        .to_string(),
                ),
                Page::Text(indicator_table_page()),
            ],
        }],
    }]
}
