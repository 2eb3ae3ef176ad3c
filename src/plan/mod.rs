use crate::model::{Extraction, FieldUniverse, LOGIN, NOTES, PASSWORD, TITLE};

/// Name given to the single worksheet of the output workbook.
pub const SHEET_NAME: &str = "Sheet";

/// Columns that always lead the header, in this order.
pub const LEADING_COLUMNS: [&str; 3] = [TITLE, LOGIN, PASSWORD];

/// A table that will be materialised as an Excel sheet. Absent cells are
/// `None` and are left blank in the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Derives the header: title, login and password first, the remaining names
/// in ascending code point order, and notes last.
pub fn column_order(universe: &FieldUniverse) -> Vec<String> {
    let mut columns: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
    // FieldUniverse iterates in sorted order already.
    columns.extend(
        universe
            .iter()
            .filter(|name| !LEADING_COLUMNS.contains(name) && *name != NOTES)
            .map(str::to_string),
    );
    columns.push(NOTES.to_string());
    columns
}

/// Lays the extracted records out as rows under the derived header.
pub fn build_sheet(extraction: &Extraction) -> Sheet {
    let columns = column_order(&extraction.universe);

    let rows = extraction
        .records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).map(str::to_string))
                .collect()
        })
        .collect();

    Sheet {
        sheet_name: SHEET_NAME.to_string(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_export;
    use crate::model::Record;

    fn universe(names: &[&str]) -> FieldUniverse {
        let mut universe = FieldUniverse::new();
        for name in names {
            universe.register(name);
        }
        universe
    }

    #[test]
    fn login_and_password_are_always_present() {
        assert_eq!(
            column_order(&FieldUniverse::new()),
            vec!["Title", "Login", "Password", "Notes"]
        );
    }

    #[test]
    fn extra_columns_sorted_between_password_and_notes() {
        let names = ["Website", "PIN", "Password", "Email", "email"];
        let columns = column_order(&universe(&names));

        assert_eq!(
            columns,
            vec!["Title", "Login", "Password", "Email", "PIN", "Website", "email", "Notes"]
        );
    }

    #[test]
    fn every_universe_name_appears_once() {
        let names = ["Login", "Notes", "Title", "Zip", "Account"];
        let columns = column_order(&universe(&names));

        for name in names {
            assert_eq!(columns.iter().filter(|c| *c == name).count(), 1, "{name}");
        }
    }

    #[test]
    fn rows_follow_record_order_with_blank_gaps() {
        let mut first = Record::new("Bank");
        first.insert("PIN", "1234");
        let mut second = Record::new("Mail");
        second.insert("Login", "bob");

        let extraction = Extraction {
            records: vec![first, second],
            universe: universe(&["PIN", "Login"]),
        };

        let sheet = build_sheet(&extraction);
        assert_eq!(sheet.sheet_name, SHEET_NAME);
        assert_eq!(sheet.columns, vec!["Title", "Login", "Password", "PIN", "Notes"]);
        assert_eq!(
            sheet.rows,
            vec![
                vec![Some("Bank".to_string()), None, None, Some("1234".to_string()), None],
                vec![Some("Mail".to_string()), Some("bob".to_string()), None, None, None],
            ]
        );
    }

    #[test]
    fn empty_field_keeps_column_from_other_entries() {
        let extraction = parse_export(
            r#"<database>
                <card title="A"><field name="PIN"></field></card>
                <card title="B"><field name="PIN">42</field></card>
            </database>"#,
        )
        .expect("export parsed");

        let sheet = build_sheet(&extraction);
        assert_eq!(sheet.columns, vec!["Title", "Login", "Password", "PIN", "Notes"]);
        assert_eq!(sheet.rows[0][3], None);
        assert_eq!(sheet.rows[1][3], Some("42".to_string()));
    }

    #[test]
    fn no_records_yields_header_only() {
        let sheet = build_sheet(&Extraction::default());

        assert!(sheet.rows.is_empty());
        assert_eq!(sheet.columns.len(), 4);
    }
}
