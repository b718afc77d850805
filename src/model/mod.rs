pub mod alphabet;
pub mod confusion;
pub mod instance;
pub mod profile;
pub mod traits;

pub use alphabet::LabelAlphabet;
pub use confusion::ConfusionMatrix;
pub use instance::{Instance, LabelPair, paired_column};
