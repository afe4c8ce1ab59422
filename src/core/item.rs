use crate::error::MapperError;

/// Supplies the whole text to deserialize.
pub trait TextSource {
    fn read_text(&self) -> Result<String, MapperError>;
}

/// Receives the whole serialized text.
pub trait TextSink {
    fn write_text(&self, text: &str) -> Result<(), MapperError>;

    fn flush(&self) -> Result<(), MapperError> {
        Ok(())
    }
}

impl TextSource for str {
    fn read_text(&self) -> Result<String, MapperError> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn read_text(&self) -> Result<String, MapperError> {
        Ok(self.clone())
    }
}
