use crate::enums::severity::Severity;
use crate::structs::pattern_def::PatternDef;

const CATEGORY: &str = "Database";

pub const PATTERNS: &[PatternDef] = &[
    PatternDef {
        pattern: r"ECONNREFUSED.*5432",
        title: "PostgreSQL Connection Refused",
        category: CATEGORY,
        explanation: "Nothing is listening on PostgreSQL's default port 5432.",
        fix: "Start PostgreSQL (brew services, systemctl or docker) and check the host and port in DATABASE_URL.",
        auto_fix_cmd: Some("pg_isready -h localhost -p 5432"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ECONNREFUSED.*3306",
        title: "MySQL Connection Refused",
        category: CATEGORY,
        explanation: "Nothing is listening on MySQL's default port 3306.",
        fix: "Start the MySQL server and check the host and port in your connection settings.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ECONNREFUSED.*27017|MongoServerSelectionError",
        title: "MongoDB Connection Refused",
        category: CATEGORY,
        explanation: "The MongoDB driver could not reach any server.",
        fix: "Start mongod (default port 27017) or check the connection string and Atlas IP allowlist.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"ECONNREFUSED.*6379",
        title: "Redis Connection Refused",
        category: CATEGORY,
        explanation: "Nothing is listening on Redis's default port 6379.",
        fix: "Start redis-server and check REDIS_URL.",
        auto_fix_cmd: Some("redis-cli ping"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"password authentication failed for user "([^"]+)""#,
        title: "PostgreSQL Authentication Failed",
        category: CATEGORY,
        explanation: "PostgreSQL rejected the credentials.",
        fix: "Check the password for role \"$1\" in your connection string, and the auth method in pg_hba.conf.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"database "([^"]+)" does not exist"#,
        title: "PostgreSQL Database Missing",
        category: CATEGORY,
        explanation: "The server is reachable but the named database was never created.",
        fix: "Create it with `createdb $1`, or fix the database name in the connection string.",
        auto_fix_cmd: Some("createdb $1"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r#"relation "([^"]+)" does not exist"#,
        title: "Table Does Not Exist",
        category: CATEGORY,
        explanation: "The query references a table or view that is not in the database.",
        fix: "Run your migrations, or check the schema and spelling of \"$1\".",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"duplicate key value violates unique constraint|UNIQUE constraint failed",
        title: "Unique Constraint Violation",
        category: CATEGORY,
        explanation: "An insert or update would create a second row with a value that must be unique.",
        fix: "Check for an existing row first, or use an upsert (ON CONFLICT ... DO UPDATE).",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"@prisma/client did not initialize yet",
        title: "Prisma Client Not Generated",
        category: CATEGORY,
        explanation: "The generated Prisma client is missing or out of date with the schema.",
        fix: "Run `npx prisma generate` after installing dependencies or changing schema.prisma.",
        auto_fix_cmd: Some("npx prisma generate"),
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"SQLITE_BUSY|database is locked",
        title: "SQLite Database Locked",
        category: CATEGORY,
        explanation: "Another connection holds a write lock on the SQLite file.",
        fix: "Close other connections or long transactions, and enable WAL mode with a busy timeout.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
    PatternDef {
        pattern: r"Access denied for user '([^']+)'@'([^']+)'",
        title: "MySQL Access Denied",
        category: CATEGORY,
        explanation: "MySQL rejected the user, password or connecting host.",
        fix: "Check the password for '$1' and that the account is allowed to connect from '$2'.",
        auto_fix_cmd: None,
        severity: Severity::Error,
    },
];
