pub mod reconcile;

pub use reconcile::apply_edit;
