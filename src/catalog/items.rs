//! Pipeline component registry
//!
//! Every draggable component that can appear in a pipeline puzzle, from
//! raw data sources through processing steps to outputs.

use serde::{Deserialize, Serialize};

/// Broad role of a component in a data stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Data,
    Storage,
    Process,
    Query,
    Source,
    Transport,
    Orchestration,
    Infra,
    Model,
    Framework,
    Analysis,
    Visual,
    Tool,
    Output,
}

/// A placeable pipeline component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
}

/// All built-in components
pub const ITEMS: &[Item] = &[
    // Basics
    Item { id: "RAW_LOGS", name: "Raw Logs", kind: ItemKind::Data },
    Item { id: "CSV", name: "CSV File", kind: ItemKind::Data },
    Item { id: "JSON", name: "JSON Data", kind: ItemKind::Data },
    Item { id: "DATABASE", name: "SQL Database", kind: ItemKind::Storage },
    Item { id: "EXCEL", name: "Excel Sheet", kind: ItemKind::Data },
    // Processing
    Item { id: "PYTHON_CLEAN", name: "Python Script", kind: ItemKind::Process },
    Item { id: "SQL_QUERY", name: "SQL Query", kind: ItemKind::Query },
    Item { id: "PANDAS", name: "Pandas Transform", kind: ItemKind::Process },
    Item { id: "SPARK", name: "Spark Job", kind: ItemKind::Process },
    // Infrastructure
    Item { id: "API", name: "REST API", kind: ItemKind::Source },
    Item { id: "KAFKA", name: "Kafka Stream", kind: ItemKind::Transport },
    Item { id: "WAREHOUSE", name: "Snowflake DW", kind: ItemKind::Storage },
    Item { id: "DATALAKE", name: "S3 Data Lake", kind: ItemKind::Storage },
    Item { id: "AIRFLOW", name: "Airflow DAG", kind: ItemKind::Orchestration },
    Item { id: "K8S", name: "Kubernetes", kind: ItemKind::Infra },
    Item { id: "DOCKER", name: "Docker Container", kind: ItemKind::Infra },
    Item { id: "IOT_SENSOR", name: "IoT Sensor", kind: ItemKind::Source },
    Item { id: "BIGQUERY", name: "BigQuery", kind: ItemKind::Storage },
    Item { id: "REDIS", name: "Redis Cache", kind: ItemKind::Storage },
    // Data science
    Item { id: "DATASET", name: "Training Set", kind: ItemKind::Data },
    Item { id: "SPLIT", name: "Train/Test Split", kind: ItemKind::Process },
    Item { id: "NORMALIZE", name: "Normalization", kind: ItemKind::Process },
    Item { id: "LINEAR_REG", name: "Linear Regression", kind: ItemKind::Model },
    Item { id: "RANDOM_FOREST", name: "Random Forest", kind: ItemKind::Model },
    Item { id: "XGBOOST", name: "XGBoost", kind: ItemKind::Model },
    Item { id: "NEURAL_NET", name: "Neural Network", kind: ItemKind::Model },
    Item { id: "TENSORFLOW", name: "TensorFlow", kind: ItemKind::Framework },
    Item { id: "IMG_PROCESS", name: "Image Augmentation", kind: ItemKind::Process },
    Item { id: "VALIDATION", name: "Cross-Validation", kind: ItemKind::Process },
    Item { id: "DEPLOY_MODEL", name: "Model API", kind: ItemKind::Output },
    // Analytics
    Item { id: "PIVOT", name: "Pivot Table", kind: ItemKind::Analysis },
    Item { id: "VLOOKUP", name: "VLOOKUP", kind: ItemKind::Analysis },
    Item { id: "CHART_BAR", name: "Bar Chart", kind: ItemKind::Visual },
    Item { id: "CHART_LINE", name: "Line Graph", kind: ItemKind::Visual },
    Item { id: "POWER_BI", name: "Power BI", kind: ItemKind::Tool },
    Item { id: "TABLEAU", name: "Tableau", kind: ItemKind::Tool },
    Item { id: "STORY", name: "Data Story", kind: ItemKind::Output },
    Item { id: "DASHBOARD", name: "Exec Dashboard", kind: ItemKind::Output },
    Item { id: "REPORT", name: "PDF Report", kind: ItemKind::Output },
    Item { id: "KPI", name: "KPI Metrics", kind: ItemKind::Analysis },
];

/// Look up a component by id
pub fn get(id: &str) -> Option<&'static Item> {
    ITEMS.iter().find(|item| item.id == id)
}

/// Human-readable name for a component, falling back to the raw id for
/// pack-defined components outside the registry
pub fn display_name(id: &str) -> &str {
    get(id).map(|item| item.name).unwrap_or(id)
}
