use common::jobs::{DecorativeProgress, SubmissionState};
use common::model::generation::Generation;
use common::model::qa::{
    Complexity, Domain, QaRequest, COMPLEXITY_SLIDER_DEFAULT, PAIR_COUNT_DEFAULT,
};
use common::preview::DatasetPreview;
use gloo_timers::callback::Interval;
use yew::NodeRef;

pub struct QaPanel {
    pub domain: Domain,
    /// Raw pair-count slider value, sent verbatim.
    pub num_pairs: u32,
    /// Raw `0..=100` complexity slider value.
    pub complexity: u32,
    pub context: String,
    /// Whether the sample output shows confidence percentages.
    pub show_confidence: bool,
    pub submission: SubmissionState<Generation<QaRequest>>,
    pub progress: DecorativeProgress,
    pub ticker: Option<Interval>,
    pub dataset_id: String,
    pub preview: Option<Result<DatasetPreview, String>>,
    pub preview_ref: NodeRef,
}

impl QaPanel {
    pub fn new() -> Self {
        Self {
            domain: Domain::default(),
            num_pairs: PAIR_COUNT_DEFAULT,
            complexity: COMPLEXITY_SLIDER_DEFAULT,
            context: String::new(),
            show_confidence: true,
            submission: SubmissionState::Idle,
            progress: DecorativeProgress::default(),
            ticker: None,
            dataset_id: String::new(),
            preview: None,
            preview_ref: NodeRef::default(),
        }
    }

    pub fn complexity_level(&self) -> Complexity {
        Complexity::from_slider(self.complexity)
    }

    pub fn request(&self) -> QaRequest {
        QaRequest::new(self.domain, self.complexity, self.num_pairs, &self.context)
    }
}
