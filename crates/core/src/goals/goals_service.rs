use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::goals::goals_model::{Goal, GoalWithPeople, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService {
            goal_repo,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<GoalWithPeople>> {
        self.goal_repo.load_goals_with_people()
    }

    fn get_goal(&self, goal_name: &str) -> Result<GoalWithPeople> {
        self.goal_repo.get_goal_with_people(goal_name)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        log::info!(
            "Created goal '{}' for {} x '{}'",
            goal.name,
            goal.amount,
            goal.item
        );
        self.event_sink.emit(DomainEvent::goal_created(&goal.name));
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EntityKind, Error};
    use crate::events::MockDomainEventSink;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockGoalRepository {
        goals: RwLock<Vec<Goal>>,
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals_with_people(&self) -> Result<Vec<GoalWithPeople>> {
            Ok(self
                .goals
                .read()
                .unwrap()
                .iter()
                .map(|g| GoalWithPeople::new(g, Vec::new()))
                .collect())
        }

        fn get_goal_with_people(&self, goal_name: &str) -> Result<GoalWithPeople> {
            self.goals
                .read()
                .unwrap()
                .iter()
                .find(|g| g.name == goal_name)
                .map(|g| GoalWithPeople::new(g, Vec::new()))
                .ok_or_else(|| Error::not_found(EntityKind::Goal, goal_name))
        }

        async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
            let mut goals = self.goals.write().unwrap();
            if goals.iter().any(|g| g.name == new_goal.name) {
                return Err(Error::already_exists(EntityKind::Goal, new_goal.name));
            }
            let goal = Goal::from(new_goal);
            goals.push(goal.clone());
            Ok(goal)
        }
    }

    fn new_goal(name: &str) -> NewGoal {
        NewGoal {
            name: name.to_string(),
            item: "sapling".to_string(),
            amount: 100,
        }
    }

    #[tokio::test]
    async fn create_goal_emits_event() {
        let sink = Arc::new(MockDomainEventSink::new());
        let service = GoalService::new(Arc::new(MockGoalRepository::default()))
            .with_event_sink(sink.clone());

        let goal = service.create_goal(new_goal("Trees")).await.unwrap();

        assert_eq!(goal.name, "Trees");
        assert_eq!(sink.events(), vec![DomainEvent::goal_created("Trees")]);
        assert_eq!(service.get_goal("Trees").unwrap().donations, 0);
    }

    #[tokio::test]
    async fn duplicate_goal_is_rejected_without_event() {
        let sink = Arc::new(MockDomainEventSink::new());
        let service = GoalService::new(Arc::new(MockGoalRepository::default()))
            .with_event_sink(sink.clone());
        service.create_goal(new_goal("Trees")).await.unwrap();

        let err = service.create_goal(new_goal("Trees")).await.unwrap_err();

        assert!(matches!(err, Error::AlreadyExists { kind: EntityKind::Goal, .. }));
        assert_eq!(sink.len(), 1);
        assert_eq!(service.get_goals().unwrap().len(), 1);
    }
}
