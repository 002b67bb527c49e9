use dropzone_core::{FileDescriptor, TransferPayload};

#[derive(Debug, Clone)]
/// `DataTransfer` handle exposed as a transfer payload.
pub struct WebTransfer {
    transfer: web_sys::DataTransfer,
}

impl WebTransfer {
    /// Wraps `transfer`.
    pub fn new(transfer: web_sys::DataTransfer) -> Self {
        Self { transfer }
    }

    /// Underlying browser handle.
    pub fn raw(&self) -> &web_sys::DataTransfer {
        &self.transfer
    }
}

impl TransferPayload for WebTransfer {
    fn item_count(&self) -> usize {
        self.transfer.items().length() as usize
    }

    fn file_count(&self) -> usize {
        self.transfer
            .files()
            .map(|files| files.length() as usize)
            .unwrap_or(0)
    }

    fn file_at(&self, index: usize) -> Option<FileDescriptor> {
        let index = u32::try_from(index).ok()?;
        self.transfer
            .files()?
            .get(index)
            .map(|file| descriptor_from_file(&file))
    }

    fn clear(&self) {
        // Browsers reject clearData outside a writable drag phase; there is nothing to recover.
        let _ = self.transfer.clear_data();
    }
}

/// Reads the metadata of a browser `File`.
pub fn descriptor_from_file(file: &web_sys::File) -> FileDescriptor {
    FileDescriptor::new(
        file.name(),
        js_number_to_u64(file.size()),
        js_number_to_u64(file.last_modified()),
    )
}

fn js_number_to_u64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_numbers_clamp_to_unsigned() {
        assert_eq!(js_number_to_u64(2000.0), 2000);
        assert_eq!(js_number_to_u64(1_700_000_000_123.9), 1_700_000_000_123);
        assert_eq!(js_number_to_u64(-4.0), 0);
        assert_eq!(js_number_to_u64(f64::NAN), 0);
        assert_eq!(js_number_to_u64(f64::INFINITY), 0);
    }
}
