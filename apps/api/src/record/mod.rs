// Record Model: the editable résumé-in-progress, its slot counts, and the rules
// for reconciling it with loaded or generated records.

pub mod fields;
pub mod handlers;
pub mod session;
pub mod slots;
