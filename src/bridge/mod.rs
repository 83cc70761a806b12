mod invocation;


pub use invocation::{InvocationResult, ParserInvocation, UNKNOWN_ERROR};
