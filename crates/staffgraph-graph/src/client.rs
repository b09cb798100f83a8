//! Neo4j connection management and shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query, Row, Txn};

/// Connection settings are owned by the service configuration.
pub use staffgraph_core::config::Neo4jConfig as GraphConfig;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Every operation checks a connection out of the pool for its own
/// duration and hands it back when the future completes, so a request
/// never holds a session past its last query. Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a query whose result rows are not needed.
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }

    /// Execute a write query in its own transaction and return the first
    /// row it produced.
    ///
    /// The transaction commits only after the whole result has been
    /// consumed; any failure rolls it back.
    pub async fn write_one(&self, query: Query) -> Result<Option<Row>, GraphError> {
        let mut txn = self.graph.start_txn().await?;

        match first_row(&mut txn, query).await {
            Ok(row) => {
                txn.commit().await?;
                Ok(row)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    tracing::warn!(error = %rollback, "Transaction rollback failed");
                }
                Err(e)
            }
        }
    }
}

async fn first_row(txn: &mut Txn, query: Query) -> Result<Option<Row>, GraphError> {
    let mut stream = txn.execute(query).await?;
    let mut first = None;
    while let Some(row) = stream.next(txn.handle()).await? {
        if first.is_none() {
            first = Some(row);
        }
    }
    Ok(first)
}
