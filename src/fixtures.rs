//! Shared test data.

use crate::{Catalog, CatalogEntry, DatasetLink, PublicationYear};

/// Three entries: two Nature-family journals, overlapping repositories and
/// subdisciplines, mixed-case facet values.
pub(crate) const CATALOG_JSON: &str = r#"[
  {
    "title": "Glacier velocity fields from radar interferometry",
    "authors": "A. Smith, B. Jones, C. Lee",
    "journal": "Nature",
    "pubyear": 2021,
    "linkpub": "https://doi.org/10.1038/s41586-021-00001-x",
    "linkdata": [
      {"name": "Zenodo", "url": "https://zenodo.org/record/1111"},
      {"name": "PANGAEA", "url": "https://pangaea.de/10.1594/PANGAEA.1"},
      {"name": "Zenodo", "url": "https://zenodo.org/record/2222"}
    ],
    "description": "Surface velocities of outlet glaciers.",
    "linkcomment": "Velocity grids are split by year.",
    "tags": ["glaciology", "insar"],
    "subdiscipline": ["Glaciology", "Remote sensing"]
  },
  {
    "title": "Ambient seismic noise catalog",
    "authors": "E. Garcia, F. Müller",
    "journal": "Nature Physics",
    "pubyear": "2019",
    "linkpub": "https://doi.org/10.1038/nphys1234",
    "linkdata": [
      {"name": "github", "url": "https://github.com/example/noise"}
    ],
    "description": "Cross-correlations of continuous seismic records.",
    "linkcomment": "",
    "tags": ["noise"],
    "subdiscipline": ["Seismology"]
  },
  {
    "title": "Ocean heat content reanalysis",
    "authors": "D. Brown",
    "journal": "Geophysical Research Letters",
    "pubyear": 2020,
    "linkpub": "https://doi.org/10.1029/2020GL000001",
    "linkdata": [
      {"name": "Zenodo", "url": "https://zenodo.org/record/3333"}
    ],
    "description": "Upper ocean temperatures constrained by Argo floats.",
    "linkcomment": "",
    "tags": ["ocean"],
    "subdiscipline": ["oceanography", "Remote sensing"]
  }
]"#;

pub(crate) fn catalog() -> Catalog {
    Catalog::from_json_str(CATALOG_JSON).unwrap()
}

/// A minimal entry with the given title and publication link.
pub(crate) fn entry(title: &str, link: &str) -> CatalogEntry {
    CatalogEntry {
        title: title.to_string(),
        authors: "A. Author".to_string(),
        journal: "Journal".to_string(),
        publication_year: PublicationYear::Year(2020),
        publication_link: link.to_string(),
        dataset_links: vec![DatasetLink {
            name: "Zenodo".into(),
            url: "https://zenodo.org/record/1".to_string(),
        }],
        description: String::new(),
        comment: String::new(),
        tags: Vec::new(),
        subdiscipline: vec!["Glaciology".into()],
    }
}

/// A single-entry JSON table with `field` replaced by the raw JSON `value`,
/// or removed when `value` is `None`.
pub(crate) fn json_with_field(field: &str, value: Option<&str>) -> String {
    let mut object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(
        r#"{
            "title": "T",
            "authors": "A. Author",
            "journal": "J",
            "pubyear": 2020,
            "linkpub": "https://doi.org/10.1000/t",
            "linkdata": [{"name": "Zenodo", "url": "https://zenodo.org/record/1"}],
            "description": "D",
            "linkcomment": "C",
            "tags": ["t"],
            "subdiscipline": ["S"]
        }"#,
    )
    .unwrap();
    match value {
        Some(raw) => {
            object.insert(field.to_string(), serde_json::from_str(raw).unwrap());
        }
        None => {
            object.remove(field);
        }
    }
    serde_json::Value::Array(vec![serde_json::Value::Object(object)]).to_string()
}
