pub mod route_result;
pub mod tracer;
