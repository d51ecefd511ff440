use crate::{attribute::AttributeType, kinds::RankType};

scoped_attribute_set! {
    /// Attributes of a plain subgraph.
    ///
    /// Subgraphs only group nodes, so the catalog is short. The attributes are
    /// written as bare `name=value;` statements inside the subgraph body.
    SubgraphAttributeSet
}

impl SubgraphAttributeSet {
    /// Constrains the ranks of the nodes in this subgraph.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotwright_core::attribute_set::SubgraphAttributeSet;
    /// use dotwright_core::kinds::RankType;
    ///
    /// let mut attributes = SubgraphAttributeSet::new();
    /// attributes.set_rank(RankType::Same);
    /// assert_eq!(attributes.to_string(), r#"rank="same""#);
    /// ```
    pub fn set_rank(&mut self, value: RankType) -> &mut Self {
        self.add_enum(AttributeType::Rank, value);
        self
    }

    pub fn set_comment(&mut self, value: &str) -> &mut Self {
        self.add_text(AttributeType::Comment, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rank_is_empty() {
        let mut attributes = SubgraphAttributeSet::new();
        attributes.set_rank(RankType::Default);

        assert!(attributes.is_empty());
    }

    #[test]
    fn test_rank_and_comment() {
        let mut attributes = SubgraphAttributeSet::new();
        attributes.set_rank(RankType::Min).set_comment("top row");

        assert_eq!(attributes.to_string(), r#"rank="min", comment="top row""#);
    }
}
