mod fragment_table;
mod fragment_table_builder;
mod operation_kind;

pub use fragment_table::FragmentEntry;
pub use fragment_table::FragmentTable;
pub use fragment_table_builder::FragmentTableBuildError;
pub use fragment_table_builder::FragmentTableBuilder;
pub use operation_kind::OperationKind;
