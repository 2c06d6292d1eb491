pub mod distribute;
pub mod pagination;
