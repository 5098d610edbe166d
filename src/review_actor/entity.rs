//! [`ActorEntity`] implementation for [`Review`].

use async_trait::async_trait;

use super::actions::{ReviewAction, ReviewActionResult};
use crate::framework::ActorEntity;
use crate::model::{Review, ReviewCreate};

#[async_trait]
impl ActorEntity for Review {
    type Id = String;
    type CreateParams = ReviewCreate;
    type UpdateParams = ();
    type Action = ReviewAction;
    type ActionResult = ReviewActionResult;
    type Context = ();

    /// Validates the star rating; everything else is accepted as-is.
    fn from_create_params(id: String, params: ReviewCreate) -> Result<Self, String> {
        Review::from_create(id, params)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ReviewAction,
        _ctx: &(),
    ) -> Result<ReviewActionResult, String> {
        match action {
            ReviewAction::MarkHelpful => {
                self.helpful = self.helpful.saturating_add(1);
                Ok(ReviewActionResult::MarkHelpful(self.helpful))
            }
        }
    }
}
