mod traits;

pub(crate) use traits::FieldReader;
pub use traits::DexEntity;
