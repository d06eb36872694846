#[cfg(test)]
use axum::Router;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use fake::{faker::lorem::en::Words, Fake};

/// Wrap a feature router in an in-process test server
#[cfg(test)]
pub fn test_server(router: Router) -> TestServer {
    TestServer::new(router).expect("failed to build test server")
}

/// A short random display name, e.g. for categories and types
#[cfg(test)]
pub fn fake_name() -> String {
    let words: Vec<String> = Words(1..3).fake();
    let name = words.join(" ");
    if name.is_empty() {
        "unnamed".to_string()
    } else {
        name
    }
}
