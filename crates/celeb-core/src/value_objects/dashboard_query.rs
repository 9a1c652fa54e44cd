//! Dashboard query - the immutable filter set passed into the aggregation layer

use super::{DateWindow, SentimentFilter, TopicFilter};

/// Window, topic and sentiment selection for one aggregate request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardQuery {
    pub window: DateWindow,
    pub topic: TopicFilter,
    pub sentiment: SentimentFilter,
}

impl DashboardQuery {
    /// Query over `window` with no topic filter, ranked by total interactions
    pub fn new(window: DateWindow) -> Self {
        Self {
            window,
            topic: TopicFilter::All,
            sentiment: SentimentFilter::All,
        }
    }

    pub fn with_topic(mut self, topic: TopicFilter) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_sentiment(mut self, sentiment: SentimentFilter) -> Self {
        self.sentiment = sentiment;
        self
    }
}
