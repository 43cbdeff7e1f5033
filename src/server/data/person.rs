//! Person data repository for the owner registry.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::person::{CreatePersonParams, Person, UpdatePersonParams};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active person.
    pub async fn create(&self, params: CreatePersonParams) -> Result<Person, DbErr> {
        let entity = entity::person::ActiveModel {
            document_id: ActiveValue::Set(params.document_id),
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Person::from_entity(entity)
    }

    /// Finds a person by id, active or not.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        entity::prelude::Person::find_by_id(id)
            .one(self.db)
            .await?
            .map(Person::from_entity)
            .transpose()
    }

    /// Gets all active persons ordered alphabetically by name.
    pub async fn get_active(&self) -> Result<Vec<Person>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Active.eq(true))
            .order_by_asc(entity::person::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Person::from_entity)
            .collect()
    }

    /// Checks whether another person already holds this document id.
    ///
    /// # Arguments
    /// - `document_id` - Document id to look for
    /// - `excluding` - Id of the person being updated, ignored in the check
    pub async fn document_taken(
        &self,
        document_id: &str,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Person::find()
            .filter(entity::person::Column::DocumentId.eq(document_id));

        if let Some(id) = excluding {
            query = query.filter(entity::person::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Overwrites every editable field of an existing person.
    ///
    /// # Arguments
    /// - `params` - New field values
    /// - `active` - Resolved active flag
    ///
    /// # Returns
    /// - `Ok(Person)` - The updated person
    /// - `Err(DbErr::RecordNotFound)` - No person with this id
    pub async fn update(&self, params: UpdatePersonParams, active: bool) -> Result<Person, DbErr> {
        let entity = entity::person::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            document_id: ActiveValue::Set(params.document_id),
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            active: ActiveValue::Set(active),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Person::from_entity(entity)
    }

    /// Marks a person inactive, keeping the row and its vehicles.
    pub async fn deactivate(&self, id: i32) -> Result<Person, DbErr> {
        let entity = entity::person::ActiveModel {
            id: ActiveValue::Unchanged(id),
            active: ActiveValue::Set(false),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Person::from_entity(entity)
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Active.eq(true))
            .count(self.db)
            .await
    }
}
