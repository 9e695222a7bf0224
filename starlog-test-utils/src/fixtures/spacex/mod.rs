pub mod factory;
pub mod mockito;

/// Mock endpoint helpers bound to one mockito server.
pub struct SpacexFixtures<'a> {
    pub server: &'a mut ::mockito::ServerGuard,
}

impl<'a> SpacexFixtures<'a> {
    pub fn new(server: &'a mut ::mockito::ServerGuard) -> Self {
        Self { server }
    }
}
