use thiserror::Error;

/// Rejection of a maximum flow request. No flow is pushed when a solver returns one of these.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MaxFlowError {
    #[error("source {node} is out of range for a graph with {num_nodes} nodes")]
    SourceOutOfRange { node: usize, num_nodes: usize },

    #[error("sink {node} is out of range for a graph with {num_nodes} nodes")]
    SinkOutOfRange { node: usize, num_nodes: usize },

    #[error("source and sink must differ, both are {0}")]
    SourceEqualsSink(usize),
}

pub(crate) fn validate_endpoints(num_nodes: usize, source: usize, sink: usize) -> Result<(), MaxFlowError> {
    if source >= num_nodes {
        return Err(MaxFlowError::SourceOutOfRange { node: source, num_nodes });
    }
    if sink >= num_nodes {
        return Err(MaxFlowError::SinkOutOfRange { node: sink, num_nodes });
    }
    if source == sink {
        return Err(MaxFlowError::SourceEqualsSink(source));
    }
    Ok(())
}
