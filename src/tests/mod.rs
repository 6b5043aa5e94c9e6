//! End-to-end tests for the public `transliterate` surface.

mod scenarios;
