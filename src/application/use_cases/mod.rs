/// Use cases module containing application business logic orchestration
mod generate_manifest;

pub use generate_manifest::GenerateManifestUseCase;
