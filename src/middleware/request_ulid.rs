//! Middleware for generating [ulid::Ulid]s on requests.

use http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use ulid::Ulid;

/// Make/generate ulid on requests.
#[derive(Copy, Clone, Debug, Default)]
pub struct MakeRequestUlid;

/// Implement the trait for producing a request ID from the incoming request.
/// In our case, we want to generate a new ULID each time.
impl MakeRequestId for MakeRequestUlid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let req_id = Ulid::new().to_string().parse().ok()?;
        Some(RequestId::new(req_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_fresh_ulids() {
        let request = Request::builder().body(()).unwrap();
        let mut maker = MakeRequestUlid;

        let first = maker.make_request_id(&request).unwrap();
        let second = maker.make_request_id(&request).unwrap();

        let first = first.header_value().to_str().unwrap();
        assert!(Ulid::from_string(first).is_ok());
        assert_ne!(first, second.header_value().to_str().unwrap());
    }
}
