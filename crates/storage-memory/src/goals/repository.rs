use donation_game_core::goals::{Goal, GoalRepositoryTrait, GoalWithPeople, NewGoal};
use donation_game_core::{EntityKind, Error, Result};

use crate::db::{read_store, MemoryStore, WriteHandle};
use async_trait::async_trait;

pub struct GoalRepository {
    store: MemoryStore,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(store: MemoryStore, writer: WriteHandle) -> Self {
        GoalRepository { store, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals_with_people(&self) -> Result<Vec<GoalWithPeople>> {
        let registries = read_store(&self.store)?;
        Ok(registries
            .goals
            .iter()
            .map(|goal| registries.goal_with_people(goal))
            .collect())
    }

    fn get_goal_with_people(&self, goal_name: &str) -> Result<GoalWithPeople> {
        let registries = read_store(&self.store)?;
        registries
            .goals
            .get(goal_name)
            .map(|goal| registries.goal_with_people(goal))
            .ok_or_else(|| Error::not_found(EntityKind::Goal, goal_name))
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |registries| {
                let goal = Goal::from(new_goal);
                registries
                    .goals
                    .insert(goal.clone())
                    .map_err(|rejected| Error::already_exists(EntityKind::Goal, rejected.name))?;
                Ok(goal)
            })
            .await
    }
}
