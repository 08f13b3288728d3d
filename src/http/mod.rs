//! Rate-limited HTTP attack execution.
mod attacker;
mod outcome;
mod rate;
mod transport;


pub use attacker::{AttackStream, Attacker, build_target_url};
pub use outcome::{AttackOutcome, TransportFailure};
pub use rate::RatePlan;
pub use transport::{HttpTransport, Transport, TransportResponse};
