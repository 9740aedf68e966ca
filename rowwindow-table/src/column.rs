use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// How a column produces its cell content.
///
/// This is an explicit tagged dispatch: a column is either a plain field
/// projection or a custom renderer. There is no implicit "call it if it's
/// there" optional function.
pub enum CellRender<T> {
    /// Projects a field out of the record. Returning `None` (missing field)
    /// degrades to an empty cell rather than failing the whole render.
    Field(Arc<dyn Fn(&T) -> Option<String> + Send + Sync>),
    /// Custom renderer receiving the full record and its absolute index.
    Custom(Arc<dyn Fn(&T, usize) -> String + Send + Sync>),
}

impl<T> Clone for CellRender<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(f) => Self::Field(Arc::clone(f)),
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for CellRender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(_) => f.write_str("Field(..)"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An ordered column descriptor: display label, optional fixed width, and the
/// cell renderer.
#[derive(Clone, Debug)]
pub struct Column<T> {
    header: String,
    width: Option<u32>,
    render: CellRender<T>,
}

impl<T> Column<T> {
    /// A plain-field column.
    pub fn field(
        header: impl Into<String>,
        f: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            width: None,
            render: CellRender::Field(Arc::new(f)),
        }
    }

    /// A custom-render column. The renderer receives the record and its
    /// absolute index in the collection.
    pub fn custom(
        header: impl Into<String>,
        f: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            width: None,
            render: CellRender::Custom(Arc::new(f)),
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn render(&self) -> &CellRender<T> {
        &self.render
    }

    /// Renders the cell for `record` at absolute index `index`.
    pub fn cell(&self, record: &T, index: usize) -> String {
        match &self.render {
            CellRender::Field(f) => f(record).unwrap_or_default(),
            CellRender::Custom(f) => f(record, index),
        }
    }
}
