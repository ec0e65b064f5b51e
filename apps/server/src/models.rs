use donation_game_core::{games as core_games, goals as core_goals, people as core_people};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Person {
    pub name: String,
    /// Name of the goal this person donates to.
    pub goal: String,
    pub winstreak: i64,
    pub donations: i64,
}

impl From<core_people::Person> for Person {
    fn from(p: core_people::Person) -> Self {
        Self {
            name: p.name,
            goal: p.goal,
            winstreak: p.winstreak,
            donations: p.donations,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Goal {
    pub name: String,
    pub item: String,
    pub amount: i64,
    pub donations: i64,
    pub people: Vec<Person>,
}

impl From<core_goals::GoalWithPeople> for Goal {
    fn from(g: core_goals::GoalWithPeople) -> Self {
        Self {
            name: g.name,
            item: g.item,
            amount: g.amount,
            donations: g.donations,
            people: g.people.into_iter().map(Person::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Game {
    pub name: String,
    /// Name of the goal the game plays for.
    pub goal: String,
    pub players: Vec<Person>,
    pub winner: Option<Person>,
}

impl From<core_games::GameWithPlayers> for Game {
    fn from(g: core_games::GameWithPlayers) -> Self {
        Self {
            name: g.name,
            goal: g.goal,
            players: g.players.into_iter().map(Person::from).collect(),
            winner: g.winner.map(Person::from),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub item: String,
    pub amount: i64,
}

impl From<NewGoal> for core_goals::NewGoal {
    fn from(g: NewGoal) -> Self {
        Self {
            name: g.name,
            item: g.item,
            amount: g.amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub goal_name: String,
}

impl From<NewPerson> for core_people::NewPerson {
    fn from(p: NewPerson) -> Self {
        Self {
            name: p.name,
            goal_name: p.goal_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewGame {
    pub name: String,
    pub goal_name: String,
}

impl From<NewGame> for core_games::NewGame {
    fn from(g: NewGame) -> Self {
        Self {
            name: g.name,
            goal_name: g.goal_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewDonation {
    pub person_name: String,
    pub amount: i64,
}

impl From<NewDonation> for core_people::NewDonation {
    fn from(d: NewDonation) -> Self {
        Self {
            person_name: d.person_name,
            amount: d.amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GoalList {
    pub goals: Vec<Goal>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PeopleList {
    pub people: Vec<Person>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GameList {
    pub games: Vec<Game>,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct PlayerQuery {
    pub person_name: String,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct WinnerQuery {
    pub winner_name: String,
}
