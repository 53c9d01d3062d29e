use serde::{Deserialize, Serialize};

/// Product waiting for review, pre-annotated with the IA subgroup suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingProduct {
    #[serde(rename = "codpro01")]
    pub code: i64,
    #[serde(rename = "descpro01")]
    pub description: String,
    #[serde(rename = "codgss_sug", default)]
    pub suggested_subgrupo_code: i64,
    #[serde(rename = "descgss_sug", default)]
    pub suggested_subgrupo_description: String,
}

/// One reviewed product sent to the submit endpoint.
///
/// Page submissions carry only the three core fields; a full submission also
/// mirrors them into the `_sql` columns and sends an empty barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSubmission {
    #[serde(rename = "codpro01")]
    pub code: i64,
    #[serde(rename = "codgss01")]
    pub subgrupo_code: i64,
    #[serde(rename = "descpro01")]
    pub description: String,
    #[serde(rename = "codpro01_sql", skip_serializing_if = "Option::is_none", default)]
    pub db_code: Option<i64>,
    #[serde(rename = "codgss01_sql", skip_serializing_if = "Option::is_none", default)]
    pub db_subgrupo_code: Option<i64>,
    #[serde(rename = "descpro01_sql", skip_serializing_if = "Option::is_none", default)]
    pub db_description: Option<String>,
    #[serde(rename = "codbarra", skip_serializing_if = "Option::is_none", default)]
    pub barcode: Option<String>,
}

impl ProductSubmission {
    pub fn page_entry(product: &PendingProduct) -> Self {
        Self {
            code: product.code,
            subgrupo_code: product.suggested_subgrupo_code,
            description: product.description.clone(),
            db_code: None,
            db_subgrupo_code: None,
            db_description: None,
            barcode: None,
        }
    }

    pub fn full_entry(product: &PendingProduct) -> Self {
        Self {
            db_code: Some(product.code),
            db_subgrupo_code: Some(product.suggested_subgrupo_code),
            db_description: Some(product.description.clone()),
            barcode: Some(String::new()),
            ..Self::page_entry(product)
        }
    }
}

/// Submit endpoints report how many products the service actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub total_cadastrados: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> PendingProduct {
        PendingProduct {
            code: 501,
            description: "AGUA MINERAL 500ML".into(),
            suggested_subgrupo_code: 1201,
            suggested_subgrupo_description: "AGUAS".into(),
        }
    }

    #[test]
    fn test_page_entry_has_core_fields_only() {
        assert_eq!(
            serde_json::to_value(ProductSubmission::page_entry(&product())).unwrap(),
            json!({ "codpro01": 501, "codgss01": 1201, "descpro01": "AGUA MINERAL 500ML" })
        );
    }

    #[test]
    fn test_full_entry_mirrors_sql_columns() {
        assert_eq!(
            serde_json::to_value(ProductSubmission::full_entry(&product())).unwrap(),
            json!({
                "codpro01": 501,
                "codpro01_sql": 501,
                "codgss01": 1201,
                "codgss01_sql": 1201,
                "descpro01": "AGUA MINERAL 500ML",
                "descpro01_sql": "AGUA MINERAL 500ML",
                "codbarra": ""
            })
        );
    }

    #[test]
    fn test_pending_product_tolerates_missing_suggestion() {
        let p: PendingProduct =
            serde_json::from_value(json!({ "codpro01": 9, "descpro01": "SABAO" })).unwrap();
        assert_eq!(p.suggested_subgrupo_code, 0);
        assert!(p.suggested_subgrupo_description.is_empty());
    }
}
