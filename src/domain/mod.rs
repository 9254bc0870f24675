pub mod component;
pub mod configuration;
pub mod error;
pub mod operation;
pub mod privilege;
pub mod requestor;

pub use component::ComponentType;
pub use configuration::{Configuration, ServiceClientConfig};
pub use error::AppError;
pub use operation::{RequestedOperation, split_groups};
pub use privilege::{Authorizable, GenericPrivilegeConverter, StructuredPrivilege};
pub use requestor::RequestorName;
