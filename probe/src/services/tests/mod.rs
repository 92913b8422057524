//! Tests for probe services
//!
//! Credential loading runs against real files in temp directories; the HTTP
//! transport runs against a local wiremock server.
