mod table;

use table::PROCESSOR_TYPES;

/// Map a splitter/classifier label to the specialized processor for it
///
/// # Arguments
/// * `document_type` - Entity type emitted by a Procurement or Lending
///   splitter/classifier (e.g., "w2", "invoice_statement")
///
/// # Returns
/// The processor type (e.g., "FORM_W2_PROCESSOR"), or `None` when no
/// specialized processor handles that label. Matching is exact and
/// case-sensitive.
pub fn document_type_to_processor_type(document_type: &str) -> Option<&'static str> {
    PROCESSOR_TYPES.get(document_type).copied()
}

/// All document-type labels with a known processor, sorted
pub fn supported_document_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = PROCESSOR_TYPES.keys().copied().collect();
    types.sort_unstable();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_document_types() {
        let test_cases = vec![
            ("w2", "FORM_W2_PROCESSOR"),
            ("w2_2021", "FORM_W2_PROCESSOR"),
            ("invoice_statement", "INVOICE_PROCESSOR"),
            ("credit_note", "INVOICE_PROCESSOR"),
            ("hotel_statement", "EXPENSE_PROCESSOR"),
            ("purchase_order", "PURCHASE_ORDER_PROCESSOR"),
            ("1099sb_2019", "FORM_1040SCH_B_PROCESSOR"),
            ("1_4_Family_Rider_3170", "FORM_FAMILY_RIDER_PROCESSOR"),
            ("4506_T_EZ", "FORM_4506T_EZ_PROCESSOR"),
            ("payslip", "PAYSTUB_PROCESSOR"),
            ("us_passport", "US_PASSPORT_PROCESSOR"),
            ("us_driver_license", "US_DRIVER_LICENSE_PROCESSOR"),
        ];

        for (document_type, expected) in test_cases {
            assert_eq!(
                document_type_to_processor_type(document_type),
                Some(expected),
                "Failed for {}",
                document_type
            );
        }
    }

    #[test]
    fn test_unknown_document_type() {
        assert_eq!(document_type_to_processor_type("unknown_type"), None);
        assert_eq!(document_type_to_processor_type(""), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(document_type_to_processor_type("W2"), None);
        assert_eq!(document_type_to_processor_type("w2 "), None);
        assert_eq!(document_type_to_processor_type("w"), None);
        assert_eq!(document_type_to_processor_type("w2_2022"), None);
        assert_eq!(document_type_to_processor_type("payslips"), None);
    }

    #[test]
    fn test_supported_document_types() {
        let types = supported_document_types();
        assert_eq!(types.len(), 156);
        assert!(types.windows(2).all(|w| w[0] < w[1]));
        assert!(types.contains(&"w9_2017"));
        assert!(types
            .iter()
            .all(|t| document_type_to_processor_type(t).is_some()));
    }
}
