/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod manifest_request;
mod manifest_response;

pub use manifest_request::ManifestRequest;
pub use manifest_response::ManifestResponse;
