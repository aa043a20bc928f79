use super::lenient::record;

record! {
    /// Paging block attached to list responses.
    pub struct Pagination {
        pub no_results: i64,
        pub page: i64,
        pub per_page: i64,
    }
}

impl Pagination {
    /// Number of pages implied by the result count, if known.
    pub fn page_count(&self) -> Option<i64> {
        match (self.no_results, self.per_page) {
            (Some(results), Some(per_page)) if per_page > 0 => {
                Some((results + per_page - 1) / per_page)
            }
            _ => None,
        }
    }
}

record! {
    /// Module settings returned by `/v1/module/{name}`.
    pub struct ModuleInfo {
        pub name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"no_results": 21, "page": 1, "per_page": 10}"#).unwrap();
        assert_eq!(pagination.page_count(), Some(3));

        let unknown = Pagination::default();
        assert_eq!(unknown.page_count(), None);
    }

    #[test]
    fn test_unknown_fields_survive() {
        let json = serde_json::json!({"name": "addressbook", "custom_fields": [], "enabled": 1});
        let info: ModuleInfo = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(info.name.as_deref(), Some("addressbook"));
        assert_eq!(serde_json::to_value(&info).unwrap(), json);
    }
}
