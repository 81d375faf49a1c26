mod fake_transport;

pub use fake_transport::{FakeTransport, RecordedRequest};
