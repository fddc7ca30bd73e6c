mod kind;
mod table;

pub use kind::TableKind;
pub use table::PropertyTable;
