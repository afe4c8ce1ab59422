/// This module provides the delimited-text serializer and deserializer.
pub mod csv;

/// This module provides file and stream text sources and sinks.
pub mod file;
