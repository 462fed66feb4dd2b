mod generate;
mod publish;

pub use generate::run_generate;
pub use publish::{run_publish, PublishTargets};
