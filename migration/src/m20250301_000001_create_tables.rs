use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Pseudo).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .col(ColumnDef::new(Classes::Description).text().null())
                    .col(ColumnDef::new(Classes::Year).integer().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级学生关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassStudents::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassStudents::Table, ClassStudents::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Value).double().not_null())
                    .col(ColumnDef::new(Grades::Comment).text().null())
                    .col(ColumnDef::new(Grades::Date).big_integer().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 班级学生表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_students_class_id")
                    .table(ClassStudents::Table)
                    .col(ClassStudents::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_students_unique")
                    .table(ClassStudents::Table)
                    .col(ClassStudents::ClassId)
                    .col(ClassStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_class_id")
                    .table(Courses::Table)
                    .col(Courses::ClassId)
                    .to_owned(),
            )
            .await?;

        // 成绩表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_course_id")
                    .table(Grades::Table)
                    .col(Grades::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_student_id")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Pseudo,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    Description,
    Year,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassStudents {
    #[sea_orm(iden = "class_students")]
    Table,
    Id,
    ClassId,
    StudentId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    ClassId,
    Name,
    Description,
    Credits,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    CourseId,
    StudentId,
    Value,
    Comment,
    Date,
    CreatedAt,
    UpdatedAt,
}
