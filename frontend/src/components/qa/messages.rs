use common::model::generation::Generation;
use common::model::qa::{Domain, QaRequest};

pub enum Msg {
    SelectDomain(Domain),
    SetPairs(u32),
    SetComplexity(u32),
    SetContext(String),
    ToggleConfidence,
    Generate,
    Tick,
    Generated(Generation<QaRequest>),
    OpenPreview,
    ClosePreview,
    Download,
}
