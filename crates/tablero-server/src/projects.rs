use serde::Serialize;

/// A mock project as the dashboard consumes it. Field order is the
/// serialization order the client sees.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub tech: String,
    pub url: String,
}

impl Project {
    #[must_use]
    pub fn new(id: u32, title: &str, status: &str, tech: &str, url: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            status: status.to_owned(),
            tech: tech.to_owned(),
            url: url.to_owned(),
        }
    }
}

/// The fixed catalog. Built once by the caller, handed to
/// `Application::build` and never touched again for the life of the process.
#[must_use]
pub fn builtin_catalog() -> Vec<Project> {
    vec![
        Project::new(1, "AI Image Gen", "Running", "Python, React", "#"),
        Project::new(2, "Data Scraper Pro", "Stopped", "FastAPI, Selenium", "#"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_two_records_with_unique_ids() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 2);

        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_serializes_in_definition_order() {
        let json = serde_json::to_string(&builtin_catalog()).expect("catalog is serializable");

        expect![[r##"[{"id":1,"title":"AI Image Gen","status":"Running","tech":"Python, React","url":"#"},{"id":2,"title":"Data Scraper Pro","status":"Stopped","tech":"FastAPI, Selenium","url":"#"}]"##]]
        .assert_eq(&json);
    }

    #[test]
    fn every_record_carries_exactly_the_five_fields() {
        let value = serde_json::to_value(builtin_catalog()).expect("catalog is serializable");

        for record in value.as_array().expect("catalog is an array") {
            let object = record.as_object().expect("record is an object");
            assert_eq!(object.len(), 5);

            assert!(object["id"].is_u64());
            for key in ["title", "status", "tech", "url"] {
                assert!(object[key].is_string(), "{key} should be a string");
            }
        }
    }
}
