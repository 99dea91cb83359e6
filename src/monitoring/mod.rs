/*!
 * Monitoring Module
 * Structured tracing for policy evaluation
 */

mod tracer;

pub use tracer::{evaluation_span, init_tracing, ENV_TRACE_JSON};
