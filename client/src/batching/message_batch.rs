use courier_std::types::MessageRecord;

#[derive(Debug, Default)]
pub(crate) struct MessageBatch {
    batch: Vec<MessageRecord>,
}

impl MessageBatch {
    pub fn push(&mut self, record: MessageRecord) {
        self.batch.push(record);
    }

    /// Takes every queued record, leaving the batch empty.
    pub fn drain(&mut self) -> Vec<MessageRecord> {
        std::mem::take(&mut self.batch)
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.batch
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}
