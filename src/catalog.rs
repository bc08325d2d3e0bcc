/// Library Catalog Module
///
/// This module is the static, typed description of the library schema
/// the browser operates on: ten writable tables, two read-only views,
/// and the menu that exposes them. Forms, statement building, and the
/// schema screen all consume this one description instead of keeping
/// their own field dictionaries. The database schema itself is an
/// external collaborator; nothing here creates or migrates it.
use once_cell::sync::Lazy;

/// Declared semantic type of a field. The lowercase name doubles as the
/// preview text seeded into form fields when preview mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    String,
    Date,
    Numeric,
    Boolean,
}

impl FieldType {
    /// The declared type name as shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Numeric => "numeric",
            FieldType::Boolean => "boolean",
        }
    }
}

/// A single declared field of a writable table.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// Write operations a table screen can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "Insert",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        }
    }
}

const TABLE_OPERATIONS: &[Operation] = &[Operation::Insert, Operation::Update, Operation::Delete];
const JUNCTION_OPERATIONS: &[Operation] = &[Operation::Insert, Operation::Delete];

/// A writable table: name, ordered fields, and whether it is one of the
/// junction tables (which have no update path).
#[derive(Debug, Clone)]
pub struct TableDef {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
    pub junction: bool,
}

impl TableDef {
    fn new(name: &'static str, junction: bool, fields: &[(&'static str, FieldType)]) -> Self {
        TableDef {
            name,
            fields: fields
                .iter()
                .map(|&(name, field_type)| FieldDef { name, field_type })
                .collect(),
            junction,
        }
    }

    /// The first declared field is the table's primary key. It is shown
    /// as the update condition and is never editable.
    pub fn primary_key(&self) -> &FieldDef {
        &self.fields[0]
    }

    /// Looks up a declared field by name, case-insensitively.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// The operation set this table's screen offers.
    pub fn operations(&self) -> &'static [Operation] {
        if self.junction {
            JUNCTION_OPERATIONS
        } else {
            TABLE_OPERATIONS
        }
    }
}

/// The full static catalog: tables, views, and menu order.
#[derive(Debug)]
pub struct Catalog {
    tables: Vec<TableDef>,
    views: Vec<&'static str>,
}

/// Global catalog instance describing the library schema.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::library);

impl Catalog {
    /// Builds the library schema description.
    fn library() -> Self {
        use FieldType::{Boolean, Date, Integer, Numeric, String};

        let tables = vec![
            TableDef::new(
                "Author",
                false,
                &[
                    ("AuthorID", Integer),
                    ("FirstName", String),
                    ("LastName", String),
                    ("Gender", String),
                    ("Birthdate", Date),
                    ("Nationality", String),
                    ("Artistname", String),
                ],
            ),
            TableDef::new(
                "Publisher",
                false,
                &[
                    ("PublisherID", Integer),
                    ("Name", String),
                    ("Email", String),
                    ("Website", String),
                    ("AddressID", Integer),
                ],
            ),
            TableDef::new(
                "Customer",
                false,
                &[
                    ("CustomerID", Integer),
                    ("FirstName", String),
                    ("LastName", String),
                    ("Email", String),
                    ("Phonenumber", String),
                    ("Birthdate", Date),
                    ("AddressID", Integer),
                ],
            ),
            TableDef::new(
                "Staffmember",
                false,
                &[
                    ("StaffmemberID", Integer),
                    ("FirstName", String),
                    ("LastName", String),
                    ("Salary", Numeric),
                    ("AvailableVacationDays", Integer),
                    ("BuildingID", Integer),
                    ("AddressID", Integer),
                ],
            ),
            TableDef::new(
                "Book",
                false,
                &[
                    ("BookID", Integer),
                    ("Title", String),
                    ("Genre", String),
                    ("ReleaseDate", Date),
                    ("Keyword", String),
                    ("PublisherID", Integer),
                ],
            ),
            TableDef::new(
                "Copy",
                false,
                &[
                    ("CopyID", Integer),
                    ("BookID", Integer),
                    ("CustomerID", Integer),
                    ("CheckoutDate", Date),
                    ("DueDate", Date),
                    ("IsReturned", Boolean),
                    ("BuildingID", Integer),
                    ("FloorNumber", Integer),
                    ("ShelfNumber", Integer),
                ],
            ),
            TableDef::new(
                "Building",
                false,
                &[
                    ("BuildingID", Integer),
                    ("FloorNumber", Integer),
                    ("WheelchairAccessibility", Boolean),
                    ("AddressID", Integer),
                ],
            ),
            TableDef::new(
                "Address",
                false,
                &[
                    ("AddressID", Integer),
                    ("Street", String),
                    ("City", String),
                    ("PostalCode", String),
                    ("State", String),
                ],
            ),
            TableDef::new("Write", true, &[("AuthorID", Integer), ("BookID", Integer)]),
            TableDef::new(
                "Review",
                true,
                &[
                    ("BookID", Integer),
                    ("CustomerID", Integer),
                    ("Stars", Integer),
                    ("Text", String),
                ],
            ),
        ];

        let views = vec![
            "CustomerCheckoutView",
            "BookAuthorPublisherMaterializedView",
        ];

        Catalog { tables, views }
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn views(&self) -> &[&'static str] {
        &self.views
    }

    /// Looks up a writable table by name, case-insensitively.
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a read-only view by name, case-insensitively, returning
    /// its canonical spelling.
    pub fn view(&self, name: &str) -> Option<&'static str> {
        self.views
            .iter()
            .copied()
            .find(|v| v.eq_ignore_ascii_case(name))
    }

    /// Menu entries in sidebar order: Home, then the views, then the
    /// writable tables.
    pub fn menu_entries(&self) -> Vec<&'static str> {
        let mut entries = vec!["Home"];
        entries.extend(self.views.iter().copied());
        entries.extend(self.tables.iter().map(|t| t.name));
        entries
    }

    /// Renders the catalog (or one table of it) as a tree-like string
    /// for the schema screen.
    pub fn describe(&self, table: Option<&TableDef>) -> String {
        let mut output = String::new();
        let tables: Vec<&TableDef> = match table {
            Some(t) => vec![t],
            None => self.tables.iter().collect(),
        };
        for table in tables {
            output.push_str(&format!("Table: {}\n", table.name));
            output.push_str(&format!("  Primary Key: {}\n", table.primary_key().name));
            let ops: Vec<&str> = table.operations().iter().map(|op| op.name()).collect();
            output.push_str(&format!("  Operations: {}\n", ops.join(", ")));
            output.push_str("  Fields:\n");
            for field in &table.fields {
                output.push_str(&format!("    {} ({})\n", field.name, field.field_type.name()));
            }
        }
        if table.is_none() {
            for view in &self.views {
                output.push_str(&format!("View: {view} (read-only)\n"));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let entries = CATALOG.menu_entries();
        assert_eq!(
            entries,
            vec![
                "Home",
                "CustomerCheckoutView",
                "BookAuthorPublisherMaterializedView",
                "Author",
                "Publisher",
                "Customer",
                "Staffmember",
                "Book",
                "Copy",
                "Building",
                "Address",
                "Write",
                "Review",
            ]
        );
    }

    #[test]
    fn test_primary_key_is_first_declared_field() {
        for table in CATALOG.tables() {
            assert_eq!(table.primary_key().name, table.fields[0].name);
        }
        assert_eq!(CATALOG.table("Author").unwrap().primary_key().name, "AuthorID");
        assert_eq!(CATALOG.table("Review").unwrap().primary_key().name, "BookID");
    }

    #[test]
    fn test_junction_tables_have_no_update() {
        let write = CATALOG.table("Write").unwrap();
        assert_eq!(
            write.operations(),
            &[Operation::Insert, Operation::Delete]
        );
        let book = CATALOG.table("Book").unwrap();
        assert_eq!(
            book.operations(),
            &[Operation::Insert, Operation::Update, Operation::Delete]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(CATALOG.table("author").is_some());
        assert!(CATALOG.table("STAFFMEMBER").is_some());
        assert!(CATALOG.table("CustomerCheckoutView").is_none());
        assert_eq!(
            CATALOG.view("customercheckoutview"),
            Some("CustomerCheckoutView")
        );
    }

    #[test]
    fn test_field_lookup_and_types() {
        let copy = CATALOG.table("Copy").unwrap();
        assert_eq!(copy.field("isreturned").unwrap().field_type, FieldType::Boolean);
        assert_eq!(copy.field("CheckoutDate").unwrap().field_type, FieldType::Date);
        assert!(copy.field("Nope").is_none());

        let staff = CATALOG.table("Staffmember").unwrap();
        assert_eq!(staff.field("Salary").unwrap().field_type, FieldType::Numeric);
    }

    #[test]
    fn test_describe_lists_fields_and_operations() {
        let author = CATALOG.table("Author").unwrap();
        let description = CATALOG.describe(Some(author));
        assert!(description.contains("Table: Author"));
        assert!(description.contains("Primary Key: AuthorID"));
        assert!(description.contains("Artistname (string)"));
        assert!(description.contains("Insert, Update, Delete"));

        let full = CATALOG.describe(None);
        assert!(full.contains("View: CustomerCheckoutView (read-only)"));
        assert!(full.contains("Table: Review"));
    }
}
