//! Grammar productions, one method per rule.
//!
//! ```text
//! Program      := ['program' Ident ';'] {VarSection | ConstSection} CompoundStmt '.'
//! VarSection   := 'var' { IdentList ':' Type ';' }
//! ConstSection := 'const' { Ident '=' Number ';' }
//! IdentList    := Ident { ',' Ident }
//! Type         := ArrayType | RecordType | StandardType
//! ArrayType    := 'array' '[' Number '..' Number ']' 'of' StandardType
//! RecordType   := 'record' { IdentList ':' StandardType ';' } 'end'
//! CompoundStmt := 'begin' { Statement [';'] } 'end'
//! Statement    := (Ident | 'writeln') [ '[' Number ']' | '.' Ident ]
//!                 [ ':=' Expression | '(' ArgList ')' ]
//! ArgList      := [ Arg { ',' Arg } ]
//! Arg          := String | Expression
//! Expression   := Term { ('+' | '-' | '*' | '/') Term }
//! Term         := Ident | Number
//! ```

mod declarations;
mod expressions;
mod program;
mod statements;
