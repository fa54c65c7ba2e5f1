//! Static reference documentation for completion and hover: YAQL built-in
//! functions and Mistral DSL keys.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: &'static str,
    pub signature: &'static str,
    pub documentation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyDoc {
    pub key: &'static str,
    pub documentation: &'static str,
}

const fn function(
    name: &'static str,
    signature: &'static str,
    documentation: &'static str,
) -> FunctionDoc {
    FunctionDoc {
        name,
        signature,
        documentation,
    }
}

const fn key(key: &'static str, documentation: &'static str) -> KeyDoc {
    KeyDoc { key, documentation }
}

pub static YAQL_FUNCTIONS: &[FunctionDoc] = &[
    function(
        "map",
        "map(list, func)",
        "Applies the `func` function to each element in the list and returns a new list.",
    ),
    function(
        "filter",
        "filter(list, predicate)",
        "Filters the elements of the list according to the predicate, returning those for which it is true.",
    ),
    function(
        "tasks",
        "tasks(execution_id=null, recursive=false, state=null, flat=false)",
        "Returns tasks matching criteria (execution, status, etc.).",
    ),
    function(
        "executions",
        "executions(id=null, root_execution_id=null, state=null, from_time=null, to_time=null)",
        "Return the executions filtered by id, state or date.",
    ),
    function(
        "task",
        "task(name)",
        "Return the task named (or null if absent).",
    ),
    function(
        "execution",
        "execution()",
        "Return the current execution details.",
    ),
    function(
        "env",
        "env()",
        "Return the execution environment variables.",
    ),
    function(
        "global",
        "global(name)",
        "Return the global variable named (or null if absent).",
    ),
    function(
        "bool",
        "bool(value)",
        "Converts a value to boolean (0/\"\" => false).",
    ),
    function(
        "isBoolean",
        "isBoolean(value)",
        "Returns true if value is a boolean.",
    ),
    function(
        "isString",
        "isString(value)",
        "Returns true if value is a string.",
    ),
    function(
        "isInteger",
        "isInteger(value)",
        "Returns true if value is an integer.",
    ),
    function(
        "isNumber",
        "isNumber(value)",
        "Returns true if value is numeric.",
    ),
    function(
        "isList",
        "isList(value)",
        "Returns true if value is a list.",
    ),
    function(
        "isDict",
        "isDict(value)",
        "Returns true if value is a dictionary.",
    ),
    function(
        "isSet",
        "isSet(value)",
        "Returns true if value is a set.",
    ),
    function(
        "isDatetime",
        "isDatetime(value)",
        "Returns true if value is a datetime object.",
    ),
    function(
        "isTimespan",
        "isTimespan(value)",
        "Returns true if value is a timespan object.",
    ),
    function(
        "isRegex",
        "isRegex(value)",
        "Returns true if value is a regex object.",
    ),
    function(
        "abs",
        "abs(number)",
        "Returns the absolute value of the number.",
    ),
    function(
        "float",
        "float(value)",
        "Converts number or string to floating-point.",
    ),
    function(
        "int",
        "int(value)",
        "Converts value (number/string/null) to integer.",
    ),
    function(
        "max",
        "max(a, b)",
        "Returns the maximum of two numbers.",
    ),
    function(
        "min",
        "min(a, b)",
        "Returns the minimum of two numbers.",
    ),
    function(
        "bitwiseAnd",
        "bitwiseAnd(x, y)",
        "Returns bitwise AND of two integers.",
    ),
    function(
        "bitwiseOr",
        "bitwiseOr(x, y)",
        "Returns bitwise OR of two integers.",
    ),
    function(
        "bitwiseXor",
        "bitwiseXor(x, y)",
        "Returns bitwise XOR of two integers.",
    ),
    function(
        "bitwiseNot",
        "bitwiseNot(x)",
        "Returns bitwise NOT of the integer.",
    ),
    function(
        "add",
        "add(set, ...values)",
        "Adds values to a set, returning new set.",
    ),
    function(
        "contains",
        "contains(coll, val)",
        "Returns true if collection contains value.",
    ),
    function(
        "containsKey",
        "containsKey(dict, key)",
        "Returns true if dictionary has key.",
    ),
    function(
        "containsValue",
        "containsValue(dict, val)",
        "Returns true if dictionary has value.",
    ),
    function(
        "delete",
        "delete(coll, idx, count=1)",
        "Removes elements by index and count.",
    ),
    function(
        "deleteAll",
        "deleteAll(dict, keys)",
        "Removes given keys from dictionary.",
    ),
    function(
        "dict",
        "dict(k1=>v1, ...)",
        "Creates dictionary from key=>value pairs.",
    ),
    function(
        "difference",
        "difference(s1, s2)",
        "Returns elements in s1 not in s2.",
    ),
    function(
        "union",
        "union(s1, s2)",
        "Returns union of two sets.",
    ),
    function(
        "intersect",
        "intersect(s1, s2)",
        "Returns intersection of two sets.",
    ),
    function(
        "flatten",
        "flatten(coll)",
        "Flattens nested collections into one list.",
    ),
    function(
        "get",
        "get(dict, key, default)",
        "Returns dict[key] or default if missing.",
    ),
    function(
        "insert",
        "insert(list, idx, val)",
        "Inserts value into list at index.",
    ),
    function(
        "insertMany",
        "insertMany(list, idx, vs)",
        "Inserts multiple values into list.",
    ),
    function(
        "items",
        "items(dict)",
        "Returns list of [key,value] pairs.",
    ),
    function(
        "keys",
        "keys(dict)",
        "Returns list of dictionary keys.",
    ),
    function(
        "len",
        "len(coll)",
        "Returns length of any collection or string.",
    ),
    function(
        "list",
        "list(v1, v2, ...)",
        "Creates a list from provided values.",
    ),
    function(
        "sequence",
        "sequence(start=0, step=1)",
        "Generates infinite sequence by step.",
    ),
    function(
        "first",
        "first(coll)",
        "Returns first element or default if empty.",
    ),
    function(
        "last",
        "last(coll)",
        "Returns last element or default if empty.",
    ),
    function(
        "indexOf",
        "indexOf(coll, val)",
        "Returns first index of value or -1.",
    ),
    function(
        "indexWhere",
        "indexWhere(coll, pred)",
        "Returns first index matching predicate.",
    ),
    function(
        "lastIndexOf",
        "lastIndexOf(coll, val)",
        "Returns last index of value or -1.",
    ),
    function(
        "lastIndexWhere",
        "lastIndexWhere(coll,p)",
        "Returns last index matching predicate.",
    ),
    function(
        "distinct",
        "distinct(coll)",
        "Returns unique elements from collection.",
    ),
    function(
        "reverse",
        "reverse(coll)",
        "Returns elements in reverse order.",
    ),
    function(
        "where",
        "where(coll, pred)",
        "Filters collection by predicate.",
    ),
    function(
        "select",
        "select(coll, fn)",
        "Applies fn to each element.",
    ),
    function(
        "selectMany",
        "selectMany(coll, fn)",
        "Maps and flattens results.",
    ),
    function(
        "join",
        "join(c1, c2, cond)",
        "Joins two collections by condition.",
    ),
    function(
        "aggregate",
        "aggregate(coll, fn)",
        "Cumulatively aggregates collection elements.",
    ),
    function(
        "sum",
        "sum(coll)",
        "Sums all numeric elements.",
    ),
    function(
        "skip",
        "skip(coll, count)",
        "Skips first count elements.",
    ),
    function(
        "skipWhile",
        "skipWhile(coll, pred)",
        "Skips while predicate is true.",
    ),
    function(
        "takeWhile",
        "takeWhile(coll, pred)",
        "Takes while predicate is true.",
    ),
    function(
        "slice",
        "slice(coll, length)",
        "Splits into sublists of given length.",
    ),
    function(
        "sliceWhere",
        "sliceWhere(coll, pred)",
        "Splits when predicate value changes.",
    ),
    function(
        "splitAt",
        "splitAt(coll, idx)",
        "Splits into two lists at index.",
    ),
    function(
        "splitWhere",
        "splitWhere(coll, pred)",
        "Splits at elements where predicate true.",
    ),
    function(
        "single",
        "single(coll)",
        "Returns sole element or throws if multiple.",
    ),
    function(
        "orderBy",
        "orderBy(coll, sel)",
        "Sorts ascending by selector.",
    ),
    function(
        "orderByDescending",
        "orderByDescending(coll,sel)",
        "Sorts descending by selector.",
    ),
    function(
        "zip",
        "zip(...colls)",
        "Groups nth elements into tuples.",
    ),
    function(
        "zipLongest",
        "zipLongest(...colls)",
        "Like zip but up to longest collection.",
    ),
    function(
        "characters",
        "characters(options)",
        "Returns list of chars per categories.",
    ),
    function(
        "concat",
        "concat(s1, s2, ...)",
        "Concatenates all strings into one.",
    ),
    function(
        "endsWith",
        "endsWith(str, suffix)",
        "Returns true if string ends with suffix.",
    ),
    function(
        "startsWith",
        "startsWith(str, prefix)",
        "Returns true if string starts with prefix.",
    ),
    function(
        "toLower",
        "toLower(str)",
        "Converts string to lowercase.",
    ),
    function(
        "toUpper",
        "toUpper(str)",
        "Converts string to uppercase.",
    ),
    function(
        "trim",
        "trim(str)",
        "Trims whitespace from both ends.",
    ),
    function(
        "trimLeft",
        "trimLeft(str)",
        "Trims whitespace from start.",
    ),
    function(
        "trimRight",
        "trimRight(str)",
        "Trims whitespace from end.",
    ),
    function(
        "joinStrings",
        "join(list, separator)",
        "Joins list with separator into string.",
    ),
    function(
        "regex",
        "regex(pattern, ignoreCase, multiLine, dotAll)",
        "Compiles regex object from pattern.",
    ),
    function(
        "escapeRegex",
        "escapeRegex(str)",
        "Escapes special regex chars in string.",
    ),
    function(
        "matches",
        "matches(input, pattern)",
        "Returns true if input matches pattern.",
    ),
    function(
        "replaceBy",
        "replaceBy(input, mapping)",
        "Replaces matches via mapping function.",
    ),
    function(
        "search",
        "search(regex, string)",
        "Returns first substring matching regex.",
    ),
    function(
        "datetime",
        "datetime(year, month, day, ...)",
        "Creates or converts to datetime object.",
    ),
    function(
        "format",
        "format(datetime, formatString)",
        "Formats datetime with given pattern.",
    ),
    function(
        "now",
        "now(offset=timespan(0))",
        "Returns current datetime (with offset).",
    ),
    function(
        "timespan",
        "timespan(days, hours, ...)",
        "Creates timespan object from units.",
    ),
    function(
        "localtz",
        "localtz()",
        "Returns local timezone offset.",
    ),
    function(
        "utctz",
        "utctz()",
        "Returns UTC timezone offset (zero).",
    ),
    function(
        "assert",
        "assert(obj, cond, msg)",
        "Returns obj if cond true, else throws error.",
    ),
    function(
        "call",
        "call(fn, args, kwargs)",
        "Invokes function with provided args.",
    ),
    function(
        "let",
        "let(...values)",
        "Stores and returns values for chaining.",
    ),
    function(
        "switch",
        "switch(cond1=>v1, ..., default)",
        "Returns value of first true condition.",
    ),
];

pub static MISTRAL_KEYS: &[KeyDoc] = &[
    key("version", "Mistral DSL version (must be '2.0')."),
    key("type", "Workflow type: 'direct' or 'reverse'."),
    key("description", "Free text description of workflow or task."),
    key("input", "Input parameters for workflow or task."),
    key("vars", "Initial global variables for the workflow."),
    key("output", "Workflow output structure via expressions."),
    key("output-on-error", "Workflow output in case of error."),
    key("task-defaults", "Default values applied to all tasks."),
    key("tasks", "List of tasks in the workflow."),
    key("action", "Name of the action executed by the task."),
    key("workflow", "Name of the sub-workflow to call."),
    key("publish", "Variables published for subsequent tasks."),
    key("publish-on-error", "Variables published only on error."),
    key("input_task", "Input arguments for action or sub-workflow."),
    key("with-items", "Iterates the task over a collection."),
    key("keep-result", "Retains or discards the task result."),
    key("target", "Target executor for this task."),
    key("pause-before", "Pause before executing the task."),
    key("wait-before", "Delay before starting the task (seconds)."),
    key("wait-after", "Delay after task completion (seconds)."),
    key("fail-on", "Condition to force task failure."),
    key("timeout", "Maximum task runtime duration (seconds)."),
    key("concurrency", "Maximum parallel executions of the task."),
    key("retry", "Retry policy on task failure."),
    key("safe-rerun", "Allows safe rerun if executor dies."),
    key("on-success", "Tasks to run on success."),
    key("on-error", "Tasks to run on error."),
    key("on-complete", "Tasks to run regardless of outcome."),
    key("requires", "List of prerequisite tasks (dependencies)."),
    key("join", "Synchronization condition for parallel branches."),
];

pub fn function_doc(name: &str) -> Option<&'static FunctionDoc> {
    YAQL_FUNCTIONS.iter().find(|f| f.name == name)
}

pub fn key_doc(name: &str) -> Option<&'static KeyDoc> {
    MISTRAL_KEYS.iter().find(|k| k.key == name)
}
