/// Use cases module containing application business logic orchestration
mod run_demo;

pub use run_demo::RunDemoUseCase;
