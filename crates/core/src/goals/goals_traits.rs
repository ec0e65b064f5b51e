use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalWithPeople, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals_with_people(&self) -> Result<Vec<GoalWithPeople>>;
    fn get_goal_with_people(&self, goal_name: &str) -> Result<GoalWithPeople>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<GoalWithPeople>>;
    fn get_goal(&self, goal_name: &str) -> Result<GoalWithPeople>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
}
