pub mod answer_builder;
pub mod workload_matcher_service;

pub use answer_builder::AnswerBuilder;
pub use workload_matcher_service::WorkloadMatcherService;
