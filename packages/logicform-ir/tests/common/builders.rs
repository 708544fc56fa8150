//! Test data builders

use logicform_ir::OperationRecord;

/// Builder for one question's operation records
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    records: Vec<OperationRecord>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any record
    pub fn op(mut self, operation: &str, argument: &str, dependencies: &[usize]) -> Self {
        self.records
            .push(OperationRecord::new(operation, argument, dependencies.to_vec()));
        self
    }

    pub fn select(self, argument: &str) -> Self {
        self.op("select", argument, &[])
    }

    pub fn filter(self, kind: &str, value: &str, dep: usize) -> Self {
        let operation = if kind.is_empty() {
            "filter".to_string()
        } else {
            format!("filter {}", kind)
        };
        self.op(&operation, value, &[dep])
    }

    pub fn relate(self, argument: &str, dep: usize) -> Self {
        self.op("relate", argument, &[dep])
    }

    pub fn query(self, field: &str, dep: usize) -> Self {
        self.op("query", field, &[dep])
    }

    /// Index the next appended record will get
    pub fn next_index(&self) -> usize {
        self.records.len()
    }

    pub fn build(self) -> Vec<OperationRecord> {
        self.records
    }
}
