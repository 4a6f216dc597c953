mod tracing;
mod userflow_service;

pub use userflow_service::UserFlowService;
