/// Flux aggregate and selector functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// sum() or sum(column: "c")
    Sum { column: Option<String> },
    /// mean()
    Mean,
    /// median()
    Median,
    /// min()
    Min,
    /// max()
    Max,
}

impl Aggregate {
    /// Sum over the default `_value` column
    pub fn sum() -> Self {
        Aggregate::Sum { column: None }
    }

    /// Sum over a specific column
    pub fn sum_of(column: impl Into<String>) -> Self {
        Aggregate::Sum {
            column: Some(column.into()),
        }
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Aggregate::Sum { .. } => "sum",
            Aggregate::Mean => "mean",
            Aggregate::Median => "median",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
        }
    }

    pub fn to_flux(&self) -> String {
        match self {
            Aggregate::Sum {
                column: Some(column),
            } => format!("sum(column: \"{}\")", column),
            _ => format!("{}()", self.function_name()),
        }
    }
}

/// Arguments of the `elapsed()` stage; unset arguments are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub column_name: Option<String>,
    pub time_column: Option<String>,
    /// Duration literal such as `1s` or `1m`, passed through unquoted
    pub unit: Option<String>,
}

impl Elapsed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn with_time_column(mut self, time_column: impl Into<String>) -> Self {
        self.time_column = Some(time_column.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn to_flux(&self) -> String {
        let mut args = Vec::new();

        if let Some(column_name) = &self.column_name {
            args.push(format!("columnName: \"{}\"", column_name));
        }
        if let Some(time_column) = &self.time_column {
            args.push(format!("timeColumn: \"{}\"", time_column));
        }
        if let Some(unit) = &self.unit {
            args.push(format!("unit: {}", unit));
        }

        format!("elapsed({})", args.join(", "))
    }
}
