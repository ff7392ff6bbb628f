/// Anything that can be sent as a single PostgREST filter parameter.
///
/// Returns `None` when there is nothing to filter on.
pub trait PostgrestFilter {
    fn as_postgrest_filter(&self) -> Option<(String, String)>;
}

/// Parameters of a read request against one table.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    pub columns: String,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn new(columns: impl Into<String>) -> Self {
        Self {
            columns: columns.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filter that matches every row.
pub struct NoFilter;

impl PostgrestFilter for NoFilter {
    fn as_postgrest_filter(&self) -> Option<(String, String)> {
        None
    }
}
