//! Mock synthesis: one backing struct and one delegating method per
//! interface method

pub mod emitter;
pub mod naming;

use crate::{error::Result, format, types::Package};
pub use emitter::{MockEmitter, forwarded_args};
pub use naming::{field_name, mock_struct_name, receiver_name, title_case};
use tracing::debug;

/// Generate the formatted mocks file for `package`
pub fn generate(package: &Package) -> Result<String> {
    debug!(
        "Generating {} mock(s) with {} method(s) for package {}",
        package.interfaces.len(),
        package.method_count(),
        package.name
    );
    let raw = MockEmitter::new().emit(package);
    format::source(&raw)
}
